pub mod entrypoint; // entrypoint where the Solana program process starts
pub mod instruction; // instruction discriminators and unpacking
pub mod processor; // instruction logic
pub mod state; // on-chain account layout

solana_program::declare_id!("Cb5aXEgXptKqHHWLifvXu5BeAuVLjojQ5ypq6CfQj1hy");
