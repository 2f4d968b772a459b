//! Run the standard advisory validation scenarios and print the results

use transitproof::advisory::{standard_rules, standard_scenarios, violation_propositions, Scenario};
use transitproof::{ProofReport, ResolutionEngine};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut json_output = false;
    let mut verbose = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json_output = true,
            "--verbose" => verbose = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Usage: {} [--json] [--verbose]", args[0]);
                std::process::exit(1);
            }
        }
    }

    let rules = standard_rules();
    let scenarios = standard_scenarios();

    if !json_output {
        println!(
            "Transit advisory inference: {} rules, {} scenarios\n",
            rules.len(),
            scenarios.len()
        );
    }

    let mut reports = Vec::new();
    let mut passed = 0;

    for scenario in &scenarios {
        let mut engine = ResolutionEngine::new(rules.clone(), violation_propositions());
        if let Err(e) = engine.add_facts(&scenario.facts) {
            eprintln!("{}: bad fact: {}", scenario.id, e);
            std::process::exit(1);
        }

        let consistency = engine.check_consistency();
        let result = match engine.prove(&scenario.query) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{}: bad query: {}", scenario.id, e);
                std::process::exit(1);
            }
        };

        let report = ProofReport::new(&engine, &scenario.query, &result);
        let ok = report.proven == scenario.expected_proven;
        if ok {
            passed += 1;
        }

        if !json_output {
            print_scenario(scenario, &report, consistency.consistent, ok, verbose);
        }
        reports.push(report);
    }

    if json_output {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}/{} scenarios matched expectations", passed, scenarios.len());
    }

    if passed != scenarios.len() {
        std::process::exit(1);
    }
}

fn print_scenario(
    scenario: &Scenario,
    report: &ProofReport,
    consistent: bool,
    ok: bool,
    verbose: bool,
) {
    println!(
        "[{}] {} ({} / {})",
        scenario.id, scenario.description, scenario.mode, scenario.kind
    );
    println!("  facts: {}", scenario.facts.join(", "));
    println!("  query: {}", scenario.query);
    println!("  facts consistent: {}", if consistent { "yes" } else { "no" });
    println!("  {}", report.explanation);
    if !report.violated_rules.is_empty() {
        println!("  violated rules: {}", report.violated_rules.join(", "));
    }
    if verbose {
        let shown = report.steps.len().min(10);
        println!("  steps (showing {} of {}):", shown, report.steps.len());
        for step in &report.steps[..shown] {
            println!(
                "    {}. {} => {}",
                step.step_num, step.description, step.resolvent
            );
        }
    }
    println!(
        "  expected proven={}, got proven={} -> {}\n",
        scenario.expected_proven,
        report.proven,
        if ok { "PASS" } else { "FAIL" }
    );
}
