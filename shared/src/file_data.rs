use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////
// Types //
////////////////////////////////////////////////////////////////

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ObjectType {
    MlData,
    PreviewVideo,
    PreviewImage,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Entity {
    pub file_id: i64,
    pub object_type: ObjectType,
    pub encrypted_data: String,
    pub decryption_header: String,
}

/// The encrypted metadata document stored alongside a file. Field names
/// match what is already in the bucket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct S3FileMetadata {
    #[serde(rename = "v")]
    pub version: i32,
    #[serde(rename = "encryptedData")]
    pub encrypted_data: String,
    #[serde(rename = "header")]
    pub decryption_header: String,
    pub client: String,
}

/// Only meant for fetching the preview video playlist and derived
/// metadata, in bulk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GetFilesData {
    pub file_ids: Vec<i64>,
    pub object_type: ObjectType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GetFileData {
    pub file_id: i64,
    pub object_type: ObjectType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GetFilesDataResponse {
    pub data: Vec<Entity>,
    pub pending_index_file_ids: Vec<i64>,
    pub err_file_ids: Vec<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GetPreviewUrl {
    pub file_id: i64,
    pub object_type: ObjectType,
    pub suffix: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewUploadUrlRequest {
    pub file_id: i64,
    pub object_type: ObjectType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewUploadUrl {
    pub object_id: String,
    pub url: String,
}

////////////////////////////////////////////////////////////////
// Helpers //
////////////////////////////////////////////////////////////////

pub const MAX_FILE_IDS: usize = 200;

fn unsupported(object_type: ObjectType) -> String {
    let mut buf = String::new();
    buf.push_str("unsupported object type ");
    buf.push_str(object_type.label());
    buf
}

fn require_metadata_type(object_type: ObjectType) -> Result<(), String> {
    match object_type {
        ObjectType::PreviewVideo | ObjectType::MlData => Ok(()),
        ObjectType::PreviewImage => Err(unsupported(object_type)),
    }
}

fn require_preview_type(object_type: ObjectType) -> Result<(), String> {
    match object_type {
        ObjectType::PreviewVideo | ObjectType::PreviewImage => Ok(()),
        ObjectType::MlData => Err(unsupported(object_type)),
    }
}

////////////////////////////////////////////////////////////////
// Api //
////////////////////////////////////////////////////////////////

impl ObjectType {
    pub fn label(self) -> &'static str {
        match self {
            ObjectType::MlData => "mldata",
            ObjectType::PreviewVideo => "vid_preview",
            ObjectType::PreviewImage => "img_preview",
        }
    }
}

impl GetFilesData {
    pub fn validate(&self) -> Result<(), String> {
        require_metadata_type(self.object_type)?;

        if self.file_ids.is_empty() {
            return Err("fileIDs are required".to_string());
        }

        if self.file_ids.len() > MAX_FILE_IDS {
            return Err("fileIDs should be less than or equal to 200".to_string());
        }

        Ok(())
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(byte_data: Vec<u8>) -> bincode::Result<GetFilesData> {
        bincode::deserialize(&byte_data[..])
    }
}

impl GetFileData {
    pub fn validate(&self) -> Result<(), String> {
        require_metadata_type(self.object_type)
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(byte_data: Vec<u8>) -> bincode::Result<GetFileData> {
        bincode::deserialize(&byte_data[..])
    }
}

impl GetFilesDataResponse {
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(byte_data: Vec<u8>) -> bincode::Result<GetFilesDataResponse> {
        bincode::deserialize(&byte_data[..])
    }
}

impl GetPreviewUrl {
    pub fn validate(&self) -> Result<(), String> {
        require_preview_type(self.object_type)
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(byte_data: Vec<u8>) -> bincode::Result<GetPreviewUrl> {
        bincode::deserialize(&byte_data[..])
    }
}

impl PreviewUploadUrlRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_preview_type(self.object_type)
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(byte_data: Vec<u8>) -> bincode::Result<PreviewUploadUrlRequest> {
        bincode::deserialize(&byte_data[..])
    }
}

impl S3FileMetadata {
    /// What a client gets back for this document. The version and the
    /// uploading client stay on the server.
    pub fn into_entity(self, file_id: i64, object_type: ObjectType) -> Entity {
        Entity {
            file_id,
            object_type,
            encrypted_data: self.encrypted_data,
            decryption_header: self.decryption_header,
        }
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(byte_data: Vec<u8>) -> bincode::Result<S3FileMetadata> {
        bincode::deserialize(&byte_data[..])
    }
}

impl PreviewUploadUrl {
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(byte_data: Vec<u8>) -> bincode::Result<PreviewUploadUrl> {
        bincode::deserialize(&byte_data[..])
    }
}
