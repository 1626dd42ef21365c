use addrscan_core::US_STATES;

/// Strategy for listing the accepted states.
///
/// Either column may appear in text; both name the same state.
#[derive(Debug, Clone, Copy)]
pub struct StatesStrategy;

impl super::CommandStrategy for StatesStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("CODE  NAME");
        for state in &US_STATES {
            println!("{:<5} {}", state.code, state.name);
        }
        Ok(())
    }
}
