// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod error;
pub mod store;
pub mod models;
pub mod query;
pub mod report;
pub mod utils;
pub mod commands;
