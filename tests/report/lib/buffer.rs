use std::{
    io,
    sync::{Arc, Mutex},
};

use super::Error;

#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.flush()
    }
}

impl Buffer {
    pub fn try_to_string(&self) -> Result<String, Error> {
        let guard = self.0.lock().map_err(|_| Error::Poison)?;
        let string = String::from_utf8(guard.to_vec()).map_err(Error::FromUtf8)?;
        Ok(string)
    }
}
