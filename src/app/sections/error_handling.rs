use crate::core::fridge::Fridge;
use crate::core::printer::{handle_send, send, try_send};
use crate::core::{Result, Section, Transcript};
use async_trait::async_trait;

pub struct ErrorHandlingSection {
    printers: Vec<String>,
    first_job: u32,
    fridge_contents: Vec<String>,
    fridge_lookup: String,
}

impl ErrorHandlingSection {
    pub fn new(
        printers: Vec<String>,
        first_job: u32,
        fridge_contents: Vec<String>,
        fridge_lookup: &str,
    ) -> Self {
        Self {
            printers,
            first_job,
            fridge_contents,
            fridge_lookup: fridge_lookup.to_string(),
        }
    }
}

#[async_trait]
impl Section for ErrorHandlingSection {
    fn name(&self) -> &'static str {
        "error_handling"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let mut job = self.first_job;
        for printer in &self.printers {
            // do/catch：吸收失敗並描述
            match send(job, printer) {
                Ok(response) => transcript.say(format!("{}: {}", printer, response)),
                Err(e) => transcript.say(format!("{}: {}", printer, e)),
            }
            transcript.say(format!("{}: {}", printer, handle_send(job, printer)));

            let outcome = try_send(job, printer);
            transcript.say(format!("{}: try? -> {}", printer, outcome));
            job = job.saturating_add(1);
        }

        let fridge = Fridge::new(self.fridge_contents.iter().cloned());
        let found = fridge.contains(&self.fridge_lookup);
        transcript.say(format!(
            "Fridge contains {}: {}, door open: {}",
            self.fridge_lookup,
            found,
            fridge.is_open()
        ));
        Ok(())
    }
}
