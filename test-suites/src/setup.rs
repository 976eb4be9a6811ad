use crate::test_fixture::{AdapterIndex, TestFixture};

/// Performance fee of the default strategy, 5%
pub const DEFAULT_PERFORMANCE_FEE: u32 = 500;

/// Create a fixture with a strategy split 50/50 over adapters A and B
pub fn create_fixture_with_data<'a>() -> (TestFixture<'a>, u32) {
    let fixture = TestFixture::create();
    let strategy_id = fixture.create_strategy(
        &[(AdapterIndex::A, 5_000), (AdapterIndex::B, 5_000)],
        DEFAULT_PERFORMANCE_FEE,
    );
    (fixture, strategy_id)
}
