// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod about;
pub mod expenses;
pub mod summary;
pub mod exporter;

use anyhow::{Result, anyhow};

pub(crate) fn required<'a, T>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    m.get_one::<T>(name)
        .ok_or_else(|| anyhow!("Missing required argument '{}'", name))
}
