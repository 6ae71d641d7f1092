use crate::models::{AllocationRequest, AllocationResult};

/// Incentive allocation.
pub trait IAllocator: Send + Sync {
    /// Compute the incentive distribution for one request snapshot.
    /// Total over every input: ineligibility is a normal result, not an error.
    fn allocate(&self, request: &AllocationRequest) -> AllocationResult;
}
