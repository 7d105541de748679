// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod models;
pub mod projection;
pub mod recurring;
pub mod store;
pub mod summary;
pub mod utils;
pub mod validate;
