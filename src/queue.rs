multiversx_sc::imports!();

use crate::types::{Proposal, ProposalState, Vote};

/// Proposal queue. Append-only, indexed from 0 by insertion order. Processed
/// proposals stay in place as the audit trail.
#[multiversx_sc::module]
pub trait ProposalQueueModule: crate::period::PeriodModule {
    /// Appends `proposal` and schedules its voting start strictly after both the
    /// current period and the previous tail's start. Returns its index.
    fn enqueue(&self, proposal: Proposal<Self::Api>) -> u64 {
        let mut proposal = proposal;
        let index = self.proposal_queue_length().get();

        let tail_start = if index == 0 {
            0
        } else {
            self.proposal_queue(index - 1).get().starting_period
        };
        proposal.starting_period = core::cmp::max(self.get_current_period(), tail_start) + 1;

        self.total_shares_requested()
            .update(|requested| *requested += &proposal.shares_requested);
        self.proposal_queue(index).set(&proposal);
        self.proposal_queue_length().set(index + 1);

        index
    }

    fn require_proposal(&self, index: u64) -> Proposal<Self::Api> {
        require!(
            index < self.proposal_queue_length().get(),
            "proposal does not exist"
        );
        self.proposal_queue(index).get()
    }

    fn proposal_state(&self, proposal: &Proposal<Self::Api>) -> ProposalState {
        proposal.state_at(
            self.get_current_period(),
            self.voting_period_length().get(),
            self.grace_period_length().get(),
        )
    }

    /// Releases the proposal's reservation on the share-request ledger.
    fn release_share_request(&self, shares_requested: &BigUint) {
        self.total_shares_requested()
            .update(|requested| *requested -= shares_requested);
    }

    // ========================================================
    // Views
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, index: u64) -> Proposal<Self::Api> {
        self.require_proposal(index)
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, index: u64) -> ProposalState {
        let proposal = self.require_proposal(index);
        self.proposal_state(&proposal)
    }

    #[view(hasVotingPeriodExpired)]
    fn has_voting_period_expired(&self, starting_period: u64) -> bool {
        self.get_current_period() >= starting_period.saturating_add(self.voting_period_length().get())
    }

    #[view(getMemberProposalVote)]
    fn get_member_proposal_vote(&self, member: ManagedAddress, index: u64) -> Vote {
        require!(
            index < self.proposal_queue_length().get(),
            "proposal does not exist"
        );
        let mapper = self.votes_by_member(index, &member);
        if mapper.is_empty() {
            Vote::Null
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // Storage
    // ========================================================

    #[view(getProposalQueueLength)]
    #[storage_mapper("proposalQueueLength")]
    fn proposal_queue_length(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposalQueue")]
    fn proposal_queue(&self, index: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("votesByMember")]
    fn votes_by_member(&self, index: u64, member: &ManagedAddress) -> SingleValueMapper<Vote>;

    /// Sum of `sharesRequested` over all unprocessed proposals.
    #[view(getTotalSharesRequested)]
    #[storage_mapper("totalSharesRequested")]
    fn total_shares_requested(&self) -> SingleValueMapper<BigUint>;

    #[view(getVotingPeriodLength)]
    #[storage_mapper("votingPeriodLength")]
    fn voting_period_length(&self) -> SingleValueMapper<u64>;

    #[view(getGracePeriodLength)]
    #[storage_mapper("gracePeriodLength")]
    fn grace_period_length(&self) -> SingleValueMapper<u64>;

    #[view(getAbortWindow)]
    #[storage_mapper("abortWindow")]
    fn abort_window(&self) -> SingleValueMapper<u64>;
}
