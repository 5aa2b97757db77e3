//! On-disk entry layout
//!
//! Entries are written back to back with no file header, no count and no
//! checksum:
//!
//! ```text
//! +------------------+
//! | Title Length     | (u32 LE)
//! +------------------+
//! | Title            | (UTF-8)
//! +------------------+
//! | Author Length    | (u32 LE)
//! +------------------+
//! | Author           | (UTF-8)
//! +------------------+
//! | Pages            | (i32 LE)
//! +------------------+
//! | Year             | (i32 LE)
//! +------------------+
//! ```
//!
//! The first text field is always the title and the second the author, on
//! both the write and the read side.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::book::{Book, BookResult};

/// Decoded entry values, not yet validated as a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub year: i32,
}

impl BookEntry {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
            pages: book.pages(),
            year: book.year(),
        }
    }

    /// Validates the decoded values.
    pub fn into_book(self) -> BookResult<Book> {
        Book::new(self.author, self.title, self.pages, self.year)
    }

    /// Number of bytes this entry occupies on disk.
    pub fn encoded_len(&self) -> u64 {
        (4 + self.title.len() + 4 + self.author.len() + 4 + 4) as u64
    }

    /// Write the entry in file layout order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_text(writer, &self.title)?;
        write_text(writer, &self.author)?;
        writer.write_i32::<LittleEndian>(self.pages)?;
        writer.write_i32::<LittleEndian>(self.year)?;
        Ok(())
    }

    /// Read one entry.
    ///
    /// A stream that ends inside the entry yields `UnexpectedEof`; text that
    /// is not UTF-8 yields `InvalidData`.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let title = read_text(reader)?;
        let author = read_text(reader)?;
        let pages = reader.read_i32::<LittleEndian>()?;
        let year = reader.read_i32::<LittleEndian>()?;

        Ok(Self {
            title,
            author,
            pages,
            year,
        })
    }
}

fn write_text<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    let len = u32::try_from(text.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("text of {} bytes exceeds the length prefix", text.len()),
        )
    })?;
    writer.write_u32::<LittleEndian>(len)?;
    writer.write_all(text.as_bytes())
}

fn read_text<R: Read>(reader: &mut R) -> io::Result<String> {
    let len = reader.read_u32::<LittleEndian>()? as u64;

    // Bounded by what the stream actually holds, not by the prefix
    let mut buf = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut buf)?;
    if (buf.len() as u64) < len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected {} text bytes, found {}", len, buf.len()),
        ));
    }

    String::from_utf8(buf).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {}", e))
    })
}
