pub mod city;
pub mod shared;
pub mod temperature;
pub mod webhook;
