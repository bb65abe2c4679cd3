pub mod block_quote;
pub mod code_fence;
pub mod header;
pub mod list;
pub mod rule;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use header::Header;
pub use list::Bullet;
pub use rule::Rule;
