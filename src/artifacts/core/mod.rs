//! Shared output plumbing

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter for the minus pager, so a graph can be paged through the
/// same `Box<dyn Write>` seam that plain stdout uses. The pager itself only
/// accepts pushed strings.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
