
/// Magic number for VAC containers.
/// "CSNG" = CipherSong.
// Protocol magic fields use `[u8; 4]` so the type enforces exactly 4 bytes and
// matches the header struct field.
pub const MAGIC_CSNG: [u8; 4] = *b"CSNG";

/// The only format version this codec reads and writes.
pub const FORMAT_V1: u32 = 1;
pub const SUPPORTED_VERSION: u32 = FORMAT_V1;

/// Symmetric key length declared in every header (AES-256).
pub const KEY_SIZE: usize = 32;

/// Width of each fixed text field (title, artist, album).
pub const FIELD_WIDTH: usize = 64;

/// Appended to text fields cut down to fit their width.
pub const ELLIPSIS: &str = "...";

/// Defaults when metadata is missing.
pub const UNKNOWN_FIELD: &str = "Unknown";
pub const DEFAULT_TRACK: u32 = 1;

/// Passphrase used when no configuration is supplied.
pub const DEFAULT_PASSPHRASE: &str = "hello mario";

/// Environment variable overriding the configured passphrase.
pub const PASSPHRASE_ENV: &str = "VAC_PASSPHRASE";

/// Upper bound on a container read into memory (4 GiB).
pub const MAX_CONTAINER_LEN: u64 = 4 * 1024 * 1024 * 1024;
