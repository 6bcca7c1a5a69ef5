// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Block partitioning of regular box domains

mod block;
mod domain;
mod partitioner;

pub use block::{Block, BlockPartition, PartitionStatus, Side};
pub use domain::BoxDomain;
pub use partitioner::{block_partition_regular_mesh, choose_multiplicities, partition_with_config};
