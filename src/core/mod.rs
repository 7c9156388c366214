pub mod backup;
pub mod crypto;
pub mod pipeline;

pub use crate::domain::model::{Artifact, CryptoMaterial, UploadReceipt, IV_LEN, KEY_LEN};
pub use crate::domain::ports::{ConfigProvider, ObjectStore, Pipeline};
pub use crate::utils::error::Result;
