//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//


pub use fetcher::*;
pub use ledger::*;
pub use simulator::*;
