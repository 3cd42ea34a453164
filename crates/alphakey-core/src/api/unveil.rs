use std::path::{Path, PathBuf};

use crate::media::{CodecOptions, Media};
use crate::{pipeline, AlphaKeyError, Key};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    key: Option<String>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Either a [`Key`] or its textual form `"x y length"`, parsing happens on execution
    pub fn using_key<K: ToString>(mut self, key: K) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Execute the unveil process and return the raw message bytes
    pub fn execute(self) -> Result<Vec<u8>, AlphaKeyError> {
        let Some(secret_media) = self.secret_media else {
            return Err(AlphaKeyError::CarrierNotSet);
        };
        let Some(key) = self.key else {
            return Err(AlphaKeyError::MissingKey);
        };
        let key: Key = key.parse()?;

        let media = Media::from_file(&secret_media)?;
        pipeline::unveil(media.image(), &key, &self.options)
    }
}
