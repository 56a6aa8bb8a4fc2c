mod api_key_formatter;
pub use self::api_key_formatter::*;

mod debug_response_body;
pub use self::debug_response_body::*;

mod status_code_formatter;
pub use self::status_code_formatter::*;

mod request_path_formatter;
pub use self::request_path_formatter::*;
