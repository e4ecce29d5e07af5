extern crate std;

use core::ptr;
use std::io::{IoSlice, Write};

use crate::InlineVec;

/// Write is implemented for `InlineVec<u8, N>` by appending to the vector.
/// The vector grows as needed, spilling to the heap once `N` is exceeded.
impl<const N: usize> Write for InlineVec<u8, N> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let num = buf.len();
        self.reserve(num);

        let len = self.len();
        // SAFETY: reserve guaranteed room for `num` more bytes.
        unsafe {
            ptr::copy_nonoverlapping(buf.as_ptr(), self.as_mut_ptr().add(len), num);
            self.set_len(len + num);
        }

        Ok(num)
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let num = bufs.iter().map(|b| b.len()).sum::<usize>();
        self.reserve(num);

        for buf in bufs {
            let buf_len = buf.len();
            let len = self.len();
            // SAFETY: the reservation above covers the combined length.
            unsafe {
                ptr::copy_nonoverlapping(buf.as_ptr(), self.as_mut_ptr().add(len), buf_len);
                self.set_len(len + buf_len);
            }
        }

        Ok(num)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.write(buf).map(|_| ())
    }
}
