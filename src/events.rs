multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("summonComplete")]
    fn summon_complete_event(&self, #[indexed] summoner: &ManagedAddress, shares: &BigUint);

    #[event("submitProposal")]
    fn submit_proposal_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] applicant: &ManagedAddress,
        #[indexed] token_tribute: &BigUint,
        #[indexed] shares_requested: &BigUint,
        value: &BigUint,
    );

    #[event("submitVote")]
    fn submit_vote_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] delegate_key: &ManagedAddress,
        #[indexed] member: &ManagedAddress,
        vote: u8,
    );

    #[event("processProposal")]
    fn process_proposal_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] applicant: &ManagedAddress,
        #[indexed] shares_requested: &BigUint,
        did_pass: bool,
    );

    #[event("ragequit")]
    fn ragequit_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] shares_burned: &BigUint,
        payout: &BigUint,
    );

    #[event("abort")]
    fn abort_event(&self, #[indexed] proposal_index: u64, #[indexed] applicant: &ManagedAddress);

    #[event("updateDelegateKey")]
    fn update_delegate_key_event(
        &self,
        #[indexed] member: &ManagedAddress,
        new_delegate_key: &ManagedAddress,
    );
}
