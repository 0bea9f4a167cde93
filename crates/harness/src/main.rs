//! Console timing harness: drives both serialization strategies across
//! increasing dataset sizes and reports elapsed time and payload size.

mod report;
mod telemetry;

use std::time::Instant;

use bookwire_catalog::{Book, sample};
use bookwire_codec::{BinarySerializer, Serializer, TaggedSerializer};

use report::{Run, Summary};

/// Dataset sizes: 10^1 .. 10^MAX_EXPONENT books.
const MAX_EXPONENT: u32 = 4;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let mut runs = Vec::new();
    measure_strategy("binary", &BinarySerializer::new(), &mut runs)?;
    measure_strategy("tagged", &TaggedSerializer::new(), &mut runs)?;

    println!("{}", serde_json::to_string_pretty(&Summary { runs })?);
    Ok(())
}

fn measure_strategy<S: Serializer>(
    name: &'static str,
    strategy: &S,
    runs: &mut Vec<Run>,
) -> anyhow::Result<()> {
    for exponent in 1..=MAX_EXPONENT {
        let count = 10usize.pow(exponent);
        let books = sample::random_books(count);

        let started = Instant::now();
        let payload = strategy.serialize(&books)?;
        let serialize_micros = started.elapsed().as_micros();

        let started = Instant::now();
        let restored: Vec<Book> = strategy.deserialize(&payload)?;
        let deserialize_micros = started.elapsed().as_micros();

        let verified = restored == books;
        tracing::info!(
            strategy = name,
            books = count,
            payload_bytes = payload.len(),
            serialize_micros = serialize_micros as u64,
            deserialize_micros = deserialize_micros as u64,
            verified,
            "run complete"
        );

        runs.push(Run {
            strategy: name,
            books: count,
            payload_bytes: payload.len(),
            serialize_micros,
            deserialize_micros,
            verified,
        });
    }

    Ok(())
}
