pub mod playlist;

pub use playlist::{MediaKind, PlaylistEntry, PlaylistStats, SplitPlaylists};
