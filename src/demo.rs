use loan_approval::workflows::loan::{handle_feedback, LoanApprovalPipeline};

const SAMPLE_JSON: &str = include_str!("../demos/applicants.json");
const SAMPLE_CSV: &str = include_str!("../demos/applicants.csv");

pub(crate) fn run_demo(pipeline: &LoanApprovalPipeline) {
    println!("\nProcessing JSON data:");
    println!("{}", pipeline.process_input(SAMPLE_JSON, "json"));

    println!("\nProcessing CSV data:");
    println!("{}", pipeline.process_input(SAMPLE_CSV, "csv"));

    println!("\nProcessing empty CSV data:");
    println!("{}", pipeline.process_input("", "csv"));

    println!("\nHandling feedback:");
    println!("{}", handle_feedback(5));
    println!("{}", handle_feedback(2));
}
