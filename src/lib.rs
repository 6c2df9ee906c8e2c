pub mod config;
pub mod error;

pub mod catalog;
pub mod index;
pub mod filter;
pub mod controller;
pub mod storage;
pub mod forms;
pub mod presentation;
pub mod theme;
pub mod auth;
pub mod chat;
pub mod dashboard;
