//! `datacore::assets` submodule provides traits that encapsulate persisting of `nature2d` data.
//!
//! [`FromFile`] and [`ToFile`] are implemented on every type that is deserializable or serializable
//! by `serde`. Data is stored in Concise Binary Object Representation format.
//!

use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Error, ErrorKind, Write},
    path::Path,
};

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable
    /// (`ErrorKind::InvalidData`).
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let file: File = File::open(filename.as_ref())?;
        serde_cbor::from_reader(BufReader::new(file)).map_err(|error| {
            tracing::debug!(path = %filename.as_ref().display(), %error, "failed to decode file");
            Error::new(ErrorKind::InvalidData, error)
        })
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// File is created if it does not exist and truncated if it does.
    /// This function fails if file creation fails or if data is not
    /// serializable by CBOR (`ErrorKind::InvalidInput`).
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error> {
        let mut writer: BufWriter<File> = BufWriter::new(File::create(filename)?);
        serde_cbor::to_writer(&mut writer, self)
            .map_err(|error| Error::new(ErrorKind::InvalidInput, error))?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::{FromFile, ToFile};
    use crate::{
        mathcore::{shapes::Shape, vectors::Vertex},
        physicscore::colliders::Collider,
    };
    use std::{env, fs, io::ErrorKind, path::PathBuf};

    #[test]
    fn collider_file() {
        let path: PathBuf = env::temp_dir().join(format!("nature2d-collider-{}.cbor", std::process::id()));
        let collider: Collider = Collider::new()
            .with_shape(Shape::circle(0.0, 0.0, 10.0))
            .with_shape(Shape::poly(vec![Vertex::zero(), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)]));

        collider.to_file(&path).expect("Temporary directory should be writable");
        let restored: Collider = Collider::from_file(&path).expect("File was just written");
        assert_eq!(restored, collider);

        fs::write(&path, b"definitely not cbor").expect("Temporary directory should be writable");
        let error = Collider::from_file(&path).expect_err("Data is garbage");
        assert_eq!(error.kind(), ErrorKind::InvalidData);

        fs::remove_file(&path).expect("File exists");
        assert_eq!(
            Collider::from_file(&path).expect_err("File was removed").kind(),
            ErrorKind::NotFound
        );
    }
}
