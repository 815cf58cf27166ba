//! Discord bot integration.
//!
//! This module provides the gateway client, the event handler, and the slash
//! command surface. The bot is started from `main` and shares its HTTP client
//! with the posting scheduler so background posts reuse the same connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild availability
//! - `GUILD_MESSAGES` - Receive message events in guilds
//! - `MESSAGE_CONTENT` - Read raw message text during history scans
//!   (privileged intent, must be enabled in the Discord Developer Portal)

pub mod commands;
pub mod handler;
pub mod start;
