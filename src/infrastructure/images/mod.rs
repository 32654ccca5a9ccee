mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryImageStore, DisabledImageStore};
