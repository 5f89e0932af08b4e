//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure password generator written in Rust.

pub mod commands;
pub mod history;
pub mod passgen;
pub mod setclip;
pub mod strength;
