pub use patternbook_error::{
    CommandError, ConfigError, ErrorExt, GenericError, PatternResult, PubSubError, ResultExt,
    StackError, StatusCode,
};
