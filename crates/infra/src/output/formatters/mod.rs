pub mod delimited;
pub mod jsonl;
pub mod markdown;
pub mod structured;
pub mod table;

pub use delimited::output_delimited;
pub use jsonl::output_jsonl;
pub use markdown::output_markdown;
pub use structured::output_json;
#[cfg(feature = "yaml")]
pub use structured::output_yaml;
pub use table::output_table;
