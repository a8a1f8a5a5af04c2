pub mod kv_pg;
pub mod text_llm;

pub use kv_pg::PgKeyValueStore;
pub use text_llm::OpenAiTextAdapter;
