#![no_std]

pub mod board;
pub mod joystick;
pub mod leds;
pub mod oled;
pub mod time;
