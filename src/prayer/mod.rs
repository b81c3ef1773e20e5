pub mod city;
pub mod client;
pub mod models;
pub mod retry;
