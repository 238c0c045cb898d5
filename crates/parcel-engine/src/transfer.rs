//! Ownership and delegate mutation of exactly-addressed parcels.
//!
//! Every operation here takes the parcel's canonical start. An interior
//! cell is [`TransferError::NoSuchAllocation`] even though the resolver
//! would find its owner.

use parcel_core::{Identity, TransferError};
use tracing::debug;

use crate::registry::LandRegistry;

impl LandRegistry {
    /// Let `delegate` transfer the parcel rooted at `start` once.
    ///
    /// Only the owner may approve. A later approval replaces the earlier
    /// delegate; any transfer clears it.
    pub fn approve(
        &mut self,
        start: u64,
        delegate: Identity,
        caller: Identity,
    ) -> Result<(), TransferError> {
        let result = self.check_approve(start, caller);
        if let Err(e) = result {
            self.metrics.transfer_rejections += 1;
            debug!(start, %caller, reason = %e, "approval rejected");
            return Err(e);
        }
        self.ledger.set_approved(start, Some(delegate));
        self.metrics.approvals += 1;
        debug!(start, %caller, %delegate, "parcel approved");
        Ok(())
    }

    /// Current delegate of the parcel rooted at `start`.
    pub fn get_approved(&self, start: u64) -> Result<Option<Identity>, TransferError> {
        self.ledger
            .get(start)
            .map(|record| record.approved)
            .ok_or(TransferError::NoSuchAllocation { index: start })
    }

    /// Move the parcel rooted at `start` from `from` to `to`.
    ///
    /// `caller` must be the owner or the approved delegate
    /// ([`TransferError::NotApproved`]), and `from` must be the current
    /// owner ([`TransferError::NotOwner`]). Clears the delegate and moves
    /// `4^tier` cells of balance from `from` to `to`.
    pub fn transfer(
        &mut self,
        start: u64,
        from: Identity,
        to: Identity,
        caller: Identity,
    ) -> Result<(), TransferError> {
        let cells = match self.check_transfer(start, from, caller) {
            Ok(cells) => cells,
            Err(e) => {
                self.metrics.transfer_rejections += 1;
                debug!(start, %from, %to, %caller, reason = %e, "transfer rejected");
                return Err(e);
            }
        };
        self.ledger.set_owner(start, to);
        self.balances.debit(from, cells);
        self.balances.credit(to, cells);
        self.metrics.transfers += 1;
        debug!(start, %from, %to, %caller, cells, "parcel transferred");
        Ok(())
    }

    fn check_approve(&self, start: u64, caller: Identity) -> Result<(), TransferError> {
        let record = self
            .ledger
            .get(start)
            .ok_or(TransferError::NoSuchAllocation { index: start })?;
        if record.owner != caller {
            return Err(TransferError::NotOwner {
                start,
                claimed: caller,
                owner: record.owner,
            });
        }
        Ok(())
    }

    /// Validate a transfer and return the cells it moves.
    fn check_transfer(
        &self,
        start: u64,
        from: Identity,
        caller: Identity,
    ) -> Result<u64, TransferError> {
        let record = self
            .ledger
            .get(start)
            .ok_or(TransferError::NoSuchAllocation { index: start })?;
        if !record.may_transfer(caller) {
            return Err(TransferError::NotApproved { start, caller });
        }
        if record.owner != from {
            return Err(TransferError::NotOwner {
                start,
                claimed: from,
                owner: record.owner,
            });
        }
        Ok(record.tier.area())
    }
}

#[cfg(test)]
mod tests {
    use crate::{LandRegistry, RegistryConfig};
    use parcel_core::{Identity, Tier, TransferError};

    const A: Identity = Identity(1);
    const B: Identity = Identity(2);
    const C: Identity = Identity(3);

    fn with_parcel(start: u64, tier: Tier) -> LandRegistry {
        let mut r = LandRegistry::new(RegistryConfig::new(6)).unwrap();
        r.allocate(start, tier, A).unwrap();
        r
    }

    #[test]
    fn approve_requires_owner() {
        let mut r = with_parcel(0, Tier::Medium);
        assert_eq!(
            r.approve(0, C, B),
            Err(TransferError::NotOwner {
                start: 0,
                claimed: B,
                owner: A,
            })
        );
        assert_eq!(r.get_approved(0), Ok(None));
    }

    #[test]
    fn approve_replaces_previous_delegate() {
        let mut r = with_parcel(0, Tier::Medium);
        r.approve(0, B, A).unwrap();
        r.approve(0, C, A).unwrap();
        assert_eq!(r.get_approved(0), Ok(Some(C)));
        assert_eq!(r.metrics().approvals, 2);
    }

    #[test]
    fn get_approved_on_interior_cell_fails() {
        let r = with_parcel(16, Tier::Medium);
        assert_eq!(
            r.get_approved(17),
            Err(TransferError::NoSuchAllocation { index: 17 })
        );
    }

    #[test]
    fn delegate_transfer_clears_approval() {
        let mut r = with_parcel(34, Tier::XSmall);
        r.approve(34, B, A).unwrap();
        r.transfer(34, A, B, B).unwrap();
        assert_eq!(r.owner_of(34), Some(B));
        assert_eq!(r.get_approved(34), Ok(None));
        // Approval was single-use: the old delegate cannot move it back.
        assert_eq!(
            r.transfer(34, B, A, A),
            Err(TransferError::NotApproved { start: 34, caller: A })
        );
    }

    #[test]
    fn stranger_cannot_transfer() {
        let mut r = with_parcel(0, Tier::Small);
        assert_eq!(
            r.transfer(0, A, C, C),
            Err(TransferError::NotApproved { start: 0, caller: C })
        );
        assert_eq!(r.metrics().transfer_rejections, 1);
        assert_eq!(r.balance_of(A), 4);
    }

    #[test]
    fn wrong_from_is_not_owner() {
        let mut r = with_parcel(0, Tier::Small);
        r.approve(0, B, A).unwrap();
        assert_eq!(
            r.transfer(0, B, C, B),
            Err(TransferError::NotOwner {
                start: 0,
                claimed: B,
                owner: A,
            })
        );
        // The failed attempt left the delegate in place.
        assert_eq!(r.get_approved(0), Ok(Some(B)));
    }

    #[test]
    fn owner_transfer_clears_existing_delegate() {
        let mut r = with_parcel(0, Tier::Small);
        r.approve(0, B, A).unwrap();
        r.transfer(0, A, C, A).unwrap();
        assert_eq!(r.get_approved(0), Ok(None));
        assert_eq!(r.balance_of(C), 4);
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let mut r = with_parcel(0, Tier::Medium);
        r.approve(0, B, A).unwrap();
        r.transfer(0, A, A, A).unwrap();
        assert_eq!(r.balance_of(A), 16);
        assert_eq!(r.get_approved(0), Ok(None));
    }

    #[test]
    fn interior_index_is_not_addressable() {
        let mut r = with_parcel(1024, Tier::XXLarge);
        assert_eq!(r.owner_of(1030), Some(A));
        assert_eq!(
            r.transfer(1030, A, B, A),
            Err(TransferError::NoSuchAllocation { index: 1030 })
        );
        assert_eq!(
            r.approve(1000, B, A),
            Err(TransferError::NoSuchAllocation { index: 1000 })
        );
        assert_eq!(r.balance_of(A), 1024);
    }
}
