multiversx_sc::imports!();

use crate::types::Member;

/// Membership registry with the delegate-key indirection.
///
/// Forward index: member -> `Member { delegate_key, .. }`.
/// Reverse index: delegate key -> member. At most one member per delegate
/// key, and a member's own identity is never another member's delegate key.
#[multiversx_sc::module]
pub trait MembersModule {
    fn is_member(&self, address: &ManagedAddress) -> bool {
        !self.members(address).is_empty()
    }

    /// Caller must be a member that still holds shares.
    fn require_member_with_shares(&self, address: &ManagedAddress) -> Member<Self::Api> {
        require!(self.is_member(address), "not a member");
        let member = self.members(address).get();
        require!(member.shares > 0u64, "not a member");
        member
    }

    /// Resolves a delegate key to the member it votes for.
    fn require_delegate(&self, delegate_key: &ManagedAddress) -> ManagedAddress {
        let mapper = self.member_address_by_delegate_key(delegate_key);
        require!(!mapper.is_empty(), "not a delegate");
        let member_address = mapper.get();
        require!(self.is_member(&member_address), "not a delegate");
        member_address
    }

    /// Registers a new member under its own delegate key, or adds `shares` to an
    /// existing one.
    fn admit_member(&self, applicant: &ManagedAddress, shares: &BigUint) {
        if self.is_member(applicant) {
            self.members(applicant)
                .update(|member| member.shares += shares);
            return;
        }

        // The applicant's identity may be in use as someone's delegate key.
        // Hand that key back to its member before the applicant claims it.
        let delegate_mapper = self.member_address_by_delegate_key(applicant);
        if !delegate_mapper.is_empty() {
            let displaced = delegate_mapper.get();
            self.members(&displaced)
                .update(|member| member.delegate_key = displaced.clone());
            self.member_address_by_delegate_key(&displaced).set(&displaced);
            self.require_delegate_index_consistent(&displaced);
        }

        let member = Member {
            delegate_key: applicant.clone(),
            shares: shares.clone(),
            exists: true,
            highest_index_yes_vote: None,
        };
        self.members(applicant).set(&member);
        self.member_address_by_delegate_key(applicant).set(applicant);
        self.require_delegate_index_consistent(applicant);
    }

    fn change_delegate_key(&self, member_address: &ManagedAddress, new_delegate_key: &ManagedAddress) {
        require!(!new_delegate_key.is_zero(), "newDelegateKey cannot be 0");

        if new_delegate_key != member_address {
            require!(
                !self.is_member(new_delegate_key),
                "cant overwrite existing members"
            );
            require!(
                self.member_address_by_delegate_key(new_delegate_key).is_empty(),
                "cant overwrite existing delegate keys"
            );
        }

        let mut member = self.members(member_address).get();
        self.member_address_by_delegate_key(&member.delegate_key).clear();
        self.member_address_by_delegate_key(new_delegate_key).set(member_address);
        member.delegate_key = new_delegate_key.clone();
        self.members(member_address).set(&member);

        self.require_delegate_index_consistent(member_address);
    }

    /// Checks that both indices agree for `member_address`.
    fn require_delegate_index_consistent(&self, member_address: &ManagedAddress) {
        let member = self.members(member_address).get();
        let reverse = self.member_address_by_delegate_key(&member.delegate_key);
        require!(
            !reverse.is_empty() && &reverse.get() == member_address,
            "delegate key index out of sync"
        );
    }

    // ========================================================
    // Views
    // ========================================================

    #[view(getMember)]
    fn get_member(&self, address: ManagedAddress) -> Member<Self::Api> {
        require!(self.is_member(&address), "member does not exist");
        self.members(&address).get()
    }

    #[view(getMemberAddressByDelegateKey)]
    fn get_member_address_by_delegate_key(&self, delegate_key: ManagedAddress) -> ManagedAddress {
        let mapper = self.member_address_by_delegate_key(&delegate_key);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // Storage
    // ========================================================

    #[storage_mapper("members")]
    fn members(&self, address: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    #[storage_mapper("memberAddressByDelegateKey")]
    fn member_address_by_delegate_key(
        &self,
        delegate_key: &ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress>;
}
