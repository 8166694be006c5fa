use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////
// Types //
////////////////////////////////////////////////////////////////

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FileType {
    Image,
    Video,
    LivePhoto,
    Other,
}

////////////////////////////////////////////////////////////////
// Api //
////////////////////////////////////////////////////////////////

pub const ALL: [FileType; 4] = [
    FileType::Image,
    FileType::Video,
    FileType::LivePhoto,
    FileType::Other,
];

impl FileType {
    /// Codes we do not know about are treated as `Other`, so a newer
    /// client can't break an older one.
    pub fn from_code(code: u8) -> FileType {
        match code {
            0 => FileType::Image,
            1 => FileType::Video,
            2 => FileType::LivePhoto,
            _ => FileType::Other,
        }
    }

    pub fn to_code(self) -> u8 {
        match self {
            FileType::Image => 0,
            FileType::Video => 1,
            FileType::LivePhoto => 2,
            FileType::Other => 3,
        }
    }

    pub fn is_video(self) -> bool {
        self == FileType::Video
    }

    pub fn label(self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::LivePhoto => "live photo",
            FileType::Other => "other",
        }
    }
}

#[cfg(test)]
mod test_file_type {
    use crate::file_type::{FileType, ALL};
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_are_stable() {
        let codes: Vec<u8> = ALL.iter().map(|file_type| file_type.to_code()).collect();

        assert_eq!(vec![0, 1, 2, 3], codes);
    }

    #[test]
    fn from_code_inverts_to_code() {
        for file_type in ALL.iter() {
            assert_eq!(*file_type, FileType::from_code(file_type.to_code()));
        }
    }

    #[test]
    fn unknown_codes_are_other() {
        assert_eq!(FileType::Other, FileType::from_code(4));
        assert_eq!(FileType::Other, FileType::from_code(255));
    }

    #[test]
    fn only_video_is_video() {
        let videos: Vec<FileType> = ALL
            .iter()
            .copied()
            .filter(|file_type| file_type.is_video())
            .collect();

        assert_eq!(vec![FileType::Video], videos);
    }
}
