pub mod resolver;

pub use resolver::{HttpWalletResolver, ResolvedUser, ResolverReply, WalletResolver};
