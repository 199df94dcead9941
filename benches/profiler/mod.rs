// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Bench knobs read from the environment. Chart renders are short, so the defaults stay small.
struct BenchSettings {
    /// pprof sampling frequency in Hz; `0` skips the flamegraph.
    profile_freq: i32,
    sample_size: usize,
    warm_up: Duration,
    measurement: Duration,
}

impl BenchSettings {
    fn from_env() -> Self {
        Self {
            profile_freq: var_or("PROFILE_FREQ", 100).clamp(0, 1000),
            sample_size: var_or("BENCH_SAMPLE_SIZE", 50).clamp(10, 200),
            warm_up: Duration::from_secs(var_or("BENCH_WARMUP_SECS", 2u64).clamp(1, 60)),
            measurement: Duration::from_secs(var_or("BENCH_MEASUREMENT_SECS", 4u64).clamp(1, 120)),
        }
    }

    fn into_criterion(self) -> Criterion {
        let base = Criterion::default()
            .sample_size(self.sample_size)
            .warm_up_time(self.warm_up)
            .measurement_time(self.measurement);
        match self.profile_freq {
            0 => base,
            freq => base.with_profiler(PProfProfiler::new(freq, Output::Flamegraph(None))),
        }
    }
}

fn var_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}

pub fn criterion() -> Criterion {
    BenchSettings::from_env().into_criterion()
}
