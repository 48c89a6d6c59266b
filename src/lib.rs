#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod guild_bank;
pub mod members;
pub mod period;
pub mod pricing;
pub mod queue;
pub mod types;

use types::{Proposal, ProposalState, Vote};

// ============================================================
// Constants
// ============================================================

/// Upper bound for the voting window, in periods.
pub const MAX_VOTING_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;

/// Upper bound for the grace window, in periods.
pub const MAX_GRACE_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;

/// Upper bound for the dilution multiplier.
pub const MAX_DILUTION_BOUND: u64 = 1_000_000_000_000_000_000;

/// Ceiling for total shares plus all outstanding share requests.
pub const MAX_NUMBER_OF_SHARES: u64 = 1_000_000_000_000_000_000;

/// Shares granted to the summoner at creation.
const SUMMONER_SHARES: u64 = 1;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CurvedMoloch:
    period::PeriodModule
    + pricing::PricingModule
    + guild_bank::GuildBankModule
    + members::MembersModule
    + queue::ProposalQueueModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        summoner: ManagedAddress,
        period_duration: u64,
        voting_period_length: u64,
        grace_period_length: u64,
        abort_window: u64,
        proposal_deposit: BigUint,
        dilution_bound: u64,
        processing_reward: BigUint,
        curve_base_price: BigUint,
        curve_slope: BigUint,
    ) {
        require!(!summoner.is_zero(), "summoner cannot be 0");
        require!(voting_period_length > 0, "_votingPeriodLength cannot be 0");
        require!(
            voting_period_length <= MAX_VOTING_PERIOD_LENGTH,
            "_votingPeriodLength exceeds limit"
        );
        require!(
            grace_period_length <= MAX_GRACE_PERIOD_LENGTH,
            "_gracePeriodLength exceeds limit"
        );
        require!(abort_window > 0, "_abortWindow cannot be 0");
        require!(
            abort_window <= voting_period_length,
            "_abortWindow must be smaller than or equal to _votingPeriodLength"
        );
        require!(dilution_bound > 0, "_dilutionBound cannot be 0");
        require!(
            dilution_bound <= MAX_DILUTION_BOUND,
            "_dilutionBound exceeds limit"
        );
        require!(
            proposal_deposit >= processing_reward,
            "_proposalDeposit cannot be smaller than _processingReward"
        );

        self.init_period_clock(period_duration);
        self.init_curve(curve_base_price, curve_slope);

        self.voting_period_length().set(voting_period_length);
        self.grace_period_length().set(grace_period_length);
        self.abort_window().set(abort_window);
        self.dilution_bound().set(dilution_bound);
        self.proposal_deposit().set(&proposal_deposit);
        self.processing_reward().set(&processing_reward);

        let summoner_shares = BigUint::from(SUMMONER_SHARES);
        self.admit_member(&summoner, &summoner_shares);
        self.total_shares().set(&summoner_shares);

        self.summon_complete_event(&summoner, &summoner_shares);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: submitProposal
    // The caller applies for shares, optionally buying internal
    // tokens for the guild bank at the current curve price.
    // ========================================================

    #[endpoint(submitProposal)]
    #[payable("EGLD")]
    fn submit_proposal(
        &self,
        token_tribute: BigUint,
        shares_requested: BigUint,
        details: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        // ── Share ceiling: current shares plus every pending request ──
        let requested_total =
            &(&self.total_shares().get() + &self.total_shares_requested().get()) + &shares_requested;
        require!(
            requested_total <= MAX_NUMBER_OF_SHARES,
            "too many shares requested"
        );

        // ── Tribute price first, then the anti-spam deposit ──
        let value = self.price_to_mint(&token_tribute, &self.token_supply().get());
        require!(
            payment >= value,
            "Did not send enough EGLD to buy tributed tokens"
        );
        let deposit = self.proposal_deposit().get();
        let after_tribute = &payment - &value;
        require!(
            after_tribute >= deposit,
            "Did not send enough EGLD for the proposal deposit"
        );

        self.hold_in_escrow(&(&value + &deposit));

        let deposited_currency = token_tribute > 0u64;
        let proposal = Proposal {
            proposer: caller.clone(),
            applicant: caller.clone(),
            shares_requested: shares_requested.clone(),
            starting_period: 0,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            processed: false,
            did_pass: false,
            aborted: false,
            token_tribute: token_tribute.clone(),
            value: value.clone(),
            deposited_currency,
            details,
            max_total_shares_at_yes_vote: BigUint::zero(),
        };
        let proposal_index = self.enqueue(proposal);

        let excess = &after_tribute - &deposit;
        if excess > 0u64 {
            self.send().direct_egld(&caller, &excess);
        }

        self.submit_proposal_event(
            proposal_index,
            &caller,
            &token_tribute,
            &shares_requested,
            &value,
        );

        proposal_index
    }

    // ========================================================
    // ENDPOINT: submitVote
    // Cast through the delegate key, weighted by current shares.
    // ========================================================

    #[endpoint(submitVote)]
    fn submit_vote(&self, proposal_index: u64, uint_vote: u8) {
        let caller = self.blockchain().get_caller();
        let member_address = self.require_delegate(&caller);
        let mut proposal = self.require_proposal(proposal_index);
        require!(uint_vote < 3, "uintVote must be less than 3");
        let vote = Vote::from_u8(uint_vote);

        match self.proposal_state(&proposal) {
            ProposalState::Queued => sc_panic!("voting period has not started"),
            ProposalState::Voting => {}
            _ => sc_panic!("voting period has expired"),
        }

        require!(
            self.votes_by_member(proposal_index, &member_address).is_empty(),
            "member has already voted on this proposal"
        );
        require!(
            vote == Vote::Yes || vote == Vote::No,
            "vote must be either Yes or No"
        );
        require!(!proposal.aborted, "proposal has been aborted");

        let mut member = self.members(&member_address).get();
        self.votes_by_member(proposal_index, &member_address).set(vote);

        match vote {
            Vote::Yes => {
                proposal.yes_votes += &member.shares;

                let total_shares = self.total_shares().get();
                if total_shares > proposal.max_total_shares_at_yes_vote {
                    proposal.max_total_shares_at_yes_vote = total_shares;
                }

                let is_new_highest = member
                    .highest_index_yes_vote
                    .map_or(true, |highest| proposal_index > highest);
                if is_new_highest {
                    member.highest_index_yes_vote = Some(proposal_index);
                    self.members(&member_address).set(&member);
                }
            }
            Vote::No => {
                proposal.no_votes += &member.shares;
            }
            Vote::Null => {}
        }

        self.proposal_queue(proposal_index).set(&proposal);
        self.submit_vote_event(proposal_index, &caller, &member_address, uint_vote);
    }

    // ========================================================
    // ENDPOINT: processProposal
    // Anyone may call once grace has elapsed. Pays the caller
    // the processing reward.
    // ========================================================

    #[endpoint(processProposal)]
    fn process_proposal(&self, proposal_index: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_index);

        match self.proposal_state(&proposal) {
            ProposalState::Queued | ProposalState::Voting | ProposalState::Grace => {
                sc_panic!("proposal is not ready to be processed")
            }
            ProposalState::ReadyToProcess => {}
            _ => sc_panic!("proposal has already been processed"),
        }
        require!(
            proposal_index == 0 || self.proposal_queue(proposal_index - 1).get().processed,
            "previous proposal must be processed"
        );

        proposal.processed = true;
        self.release_share_request(&proposal.shares_requested);

        let total_shares = self.total_shares().get();
        let within_share_ceiling =
            &total_shares + &proposal.shares_requested <= MAX_NUMBER_OF_SHARES;

        // ── Dilution: force-fail if shares ballooned since the last yes vote ──
        let dilution_ceiling =
            &proposal.max_total_shares_at_yes_vote * &BigUint::from(self.dilution_bound().get());
        let within_dilution_bound = total_shares <= dilution_ceiling;

        proposal.did_pass = !proposal.aborted
            && proposal.yes_votes > proposal.no_votes
            && within_share_ceiling
            && within_dilution_bound;

        if proposal.did_pass {
            self.admit_member(&proposal.applicant, &proposal.shares_requested);
            self.total_shares()
                .set(&total_shares + &proposal.shares_requested);
            self.take_from_escrow(&proposal.value);
            self.mint_tribute(&proposal.token_tribute, &proposal.value);
        }

        self.proposal_queue(proposal_index).set(&proposal);

        if !proposal.did_pass {
            self.release_escrow(&proposal.applicant, &proposal.value);
        }

        let deposit = self.proposal_deposit().get();
        let reward = self.processing_reward().get();
        self.release_escrow(&caller, &reward);
        self.release_escrow(&proposal.proposer, &(&deposit - &reward));

        self.process_proposal_event(
            proposal_index,
            &proposal.applicant,
            &proposal.shares_requested,
            proposal.did_pass,
        );
    }

    // ========================================================
    // ENDPOINT: ragequit
    // Burn shares for a proportional cut of the guild bank.
    // ========================================================

    #[endpoint(ragequit)]
    fn ragequit(&self, shares_to_burn: BigUint) {
        let caller = self.blockchain().get_caller();
        let mut member = self.require_member_with_shares(&caller);
        require!(shares_to_burn <= member.shares, "insufficient shares");
        require!(
            self.can_ragequit(caller.clone()),
            "cant ragequit until highest index proposal member voted YES on is processed"
        );

        // Denominator is the share count before the burn.
        let total_shares = self.total_shares().get();
        let payout = &(&self.guild_bank_balance().get() * &shares_to_burn) / &total_shares;
        let token_payout = &(&self.guild_bank_tokens().get() * &shares_to_burn) / &total_shares;

        member.shares -= &shares_to_burn;
        self.members(&caller).set(&member);
        self.total_shares().set(&total_shares - &shares_to_burn);

        self.withdraw(&caller, &payout, &token_payout);

        self.ragequit_event(&caller, &shares_to_burn, &payout);
    }

    // ========================================================
    // ENDPOINT: abortProposal
    // The applicant cancels early and gets the tribute payment
    // back. The deposit and share request stay reserved until
    // the proposal is processed.
    // ========================================================

    #[endpoint(abortProposal)]
    fn abort(&self, proposal_index: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_index);
        require!(caller == proposal.applicant, "msg.sender must be applicant");

        let abort_deadline = proposal
            .starting_period
            .saturating_add(self.abort_window().get());
        require!(
            self.get_current_period() < abort_deadline,
            "abort window must not have passed"
        );
        require!(
            !proposal.aborted,
            "proposal must not have already been aborted"
        );
        require!(!proposal.processed, "proposal has already been processed");

        let refund = core::mem::replace(&mut proposal.value, BigUint::zero());
        proposal.token_tribute = BigUint::zero();
        proposal.deposited_currency = false;
        proposal.aborted = true;
        self.proposal_queue(proposal_index).set(&proposal);

        self.release_escrow(&proposal.applicant, &refund);

        self.abort_event(proposal_index, &caller);
    }

    // ========================================================
    // ENDPOINT: updateDelegateKey
    // ========================================================

    #[endpoint(updateDelegateKey)]
    fn update_delegate_key(&self, new_delegate_key: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_member_with_shares(&caller);

        self.change_delegate_key(&caller, &new_delegate_key);

        self.update_delegate_key_event(&caller, &new_delegate_key);
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    /// False while the member's highest "yes" proposal is unprocessed. The
    /// queue is processed in order, so every earlier proposal is settled too.
    #[view(canRagequit)]
    fn can_ragequit(&self, member: ManagedAddress) -> bool {
        require!(self.is_member(&member), "member does not exist");

        match self.members(&member).get().highest_index_yes_vote {
            None => true,
            Some(highest) => self.proposal_queue(highest).get().processed,
        }
    }

    /// Curve price for `quantity` internal tokens at the current supply.
    #[view(calculatePurchaseReturn)]
    fn calculate_purchase_return(&self, quantity: BigUint) -> BigUint {
        self.price_to_mint(&quantity, &self.token_supply().get())
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getDilutionBound)]
    #[storage_mapper("dilutionBound")]
    fn dilution_bound(&self) -> SingleValueMapper<u64>;

    #[view(getProposalDeposit)]
    #[storage_mapper("proposalDeposit")]
    fn proposal_deposit(&self) -> SingleValueMapper<BigUint>;

    #[view(getProcessingReward)]
    #[storage_mapper("processingReward")]
    fn processing_reward(&self) -> SingleValueMapper<BigUint>;
}
