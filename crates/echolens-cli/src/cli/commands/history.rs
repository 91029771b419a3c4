use crate::cli::args::HistoryArgs;
use crate::exit_codes::{self, SUCCESS};
use echolens_core::history::{load_records, HistoryLoad, SAMPLE_DATA_STRUCTURE};
use echolens_core::report::console::{
    format_footer, format_history_record, format_mortality_chart, format_section,
};

pub fn run(args: HistoryArgs) -> anyhow::Result<i32> {
    let load = match load_records(&args.data) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ {e}");
            return Ok(exit_codes::for_error(&e));
        }
    };

    println!("📚 Historical Pandemic Database\n");
    match &load {
        HistoryLoad::Missing { .. } => {
            println!("📁 No historical data found. See Sample Data Structure below.\n");
        }
        HistoryLoad::Loaded { records, .. } if records.is_empty() => {
            println!("📁 The historical data file contains no records.\n");
        }
        HistoryLoad::Loaded { records, .. } => {
            for record in records {
                println!("{}", format_history_record(record));
            }
            println!(
                "{}",
                format_section("📊 Pandemic Comparison", &format_mortality_chart(records))
            );
        }
    }

    println!(
        "{}",
        format_section("📖 Sample Data Structure", SAMPLE_DATA_STRUCTURE)
    );
    println!("{}", format_footer());
    Ok(SUCCESS)
}
