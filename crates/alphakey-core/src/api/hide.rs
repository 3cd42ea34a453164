use std::path::{Path, PathBuf};

use fastrand::Rng;
use log::info;

use crate::media::{CodecOptions, Media, Persist};
use crate::{pipeline, AlphaKeyError, Key};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<Vec<u8>>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    rng: Option<Rng>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.as_bytes().to_vec());
        self
    }

    /// arbitrary bytes instead of a text message
    pub fn with_data<D: Into<Vec<u8>>>(mut self, data: D) -> Self {
        self.message = Some(data.into());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Generator used to pick the seed pixel, defaults to a randomly seeded one
    pub fn with_rng(mut self, rng: Rng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Hides the message and writes the image, returns the key needed to unveil it again
    pub fn execute(self) -> Result<Key, AlphaKeyError> {
        let Some(message) = self.message else {
            return Err(AlphaKeyError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(AlphaKeyError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(AlphaKeyError::TargetNotSet);
        };

        let media = Media::from_file(&image)?;
        let mut rng = self.rng.unwrap_or_default();
        let (key, carrier) = pipeline::hide(media.image(), &message, &mut rng, &self.options)?;

        Media::from_image(carrier).save_as(&output)?;
        info!("message hidden in {output:?}");

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        RgbaImage::from_pixel(32, 32, Rgba([90, 120, 200, 255]))
            .save(&carrier)
            .expect("Failed to write carrier image");

        let key = crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");

        assert_eq!(key.message_len, 13);
        assert!(key.x < 32 && key.y < 32);
    }

    #[test]
    fn should_insist_on_message_image_and_output() {
        assert!(matches!(
            prepare().with_image("a.png").with_output("b.png").execute(),
            Err(AlphaKeyError::MissingMessage)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_output("b.png").execute(),
            Err(AlphaKeyError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_image("a.png").execute(),
            Err(AlphaKeyError::TargetNotSet)
        ));
    }

    #[test]
    fn should_report_a_missing_carrier_with_its_cause() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");

        let result = prepare()
            .with_message("hi")
            .with_image(temp_dir.path().join("no-such-carrier.png"))
            .with_output(temp_dir.path().join("out.png"))
            .execute();

        match result {
            Err(AlphaKeyError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected IoError, got {other:?}"),
        }
    }

    #[test]
    fn should_not_write_anything_when_the_message_does_not_fit() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("tiny.png");
        let output = temp_dir.path().join("out.png");
        RgbaImage::new(2, 2).save(&carrier).unwrap();

        let result = prepare()
            .with_message("five!")
            .with_image(&carrier)
            .with_output(&output)
            .with_rng(Rng::with_seed(1))
            .execute();

        assert!(matches!(
            result,
            Err(AlphaKeyError::ImageCapacityError { .. })
        ));
        assert!(!output.exists(), "no output must be written");
    }
}
