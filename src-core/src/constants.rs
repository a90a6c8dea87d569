/// Maximum accepted length of a submitter name, in characters after trimming.
pub const NAME_MAX_CHARS: usize = 50;

/// Maximum accepted length of a feedback message, in characters after trimming.
pub const MESSAGE_MAX_CHARS: usize = 500;
