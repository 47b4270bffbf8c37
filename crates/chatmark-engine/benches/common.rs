// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_prose_message(size: usize) -> String {
    let base = "**Cardiology**\n\n1. Dr. Rao - Interventional - Full Time\n2. [DOCTORPROFILE:Dr. A|cardiology|dr-a] - Part Time\n• Call [TEL:0422 432 4324] or [EMERGENCY:108]\n• Visit us at [LOCATION:Arts College Road]\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_table_message(size: usize) -> String {
    let row = "| Dr. Rao | Cardiology | Mon-Sat | 9-5 |\n";
    format!(
        "Consultation timings:\n| Doctor | Department | Days | Hours |\n|---|---|---|---|\n{}\nSee [DOCTORSLIST:all doctors]",
        row.repeat(size)
    )
}
