pub mod layout;
pub mod media;
pub mod media_server;
pub mod preview;
pub mod playback;
pub mod export;
pub mod paths;
