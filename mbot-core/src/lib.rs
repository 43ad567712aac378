//! # mbot-core
//!
//! Core types and traits for the music search bot: [`Bot`], [`Handler`], [`Middleware`], message,
//! reply and user types, and tracing initialization. Transport-agnostic; used by mbot-telegram,
//! handler-chain and music-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, LinkButton, Message, Middleware, Reply, ToCoreMessage,
    ToCoreUser, User,
};
