// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, crate_version, value_parser};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("subscribe")
        .version(crate_version!())
        .about("SubScribe: track subscriptions, renewals and projected spend")
        .arg(
            Arg::new("currency_symbol")
                .long("currency-symbol")
                .global(true)
                .value_name("SYMBOL")
                .help("Symbol prefixed to displayed amounts (default ₹)"),
        )
        .arg(
            Arg::new("grouping")
                .long("grouping")
                .global(true)
                .value_name("STYLE")
                .help("Digit grouping for amounts: indian|western"),
        )
        .arg(
            Arg::new("renewal_window")
                .long("renewal-window")
                .global(true)
                .value_name("DAYS")
                .value_parser(value_parser!(u32))
                .help("Renewals within this many days count as expiring soon (default 7)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(output_flags(
            Command::new("dashboard").about("Spend summary, category breakdown and renewals"),
        ))
        .subcommand(output_flags(
            Command::new("list")
                .about("List subscriptions, soonest renewal first")
                .arg(Arg::new("search").long("search").value_name("TERM"))
                .arg(Arg::new("category").long("category").value_name("CATEGORY")),
        ))
        .subcommand(
            Command::new("search")
                .about("Set the session search term; no term clears it")
                .arg(Arg::new("term").num_args(0..).value_name("TERM")),
        )
        .subcommand(
            Command::new("filter")
                .about("Toggle the session category filter")
                .arg(Arg::new("category").value_name("CATEGORY"))
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .action(ArgAction::SetTrue)
                        .help("Remove the category filter"),
                )
                .group(
                    ArgGroup::new("target")
                        .args(["category", "clear"])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Add a subscription")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("plan").long("plan").required(true))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Charge per billing cycle, e.g. ₹1200"),
                )
                .arg(
                    Arg::new("cycle")
                        .long("cycle")
                        .required(true)
                        .help("monthly|yearly"),
                )
                .arg(
                    Arg::new("days_left")
                        .long("days-left")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("HR|software|hardware|healthcare|financial|other; inferred from the name when omitted"),
                )
                .arg(Arg::new("icon").long("icon"))
                .arg(
                    Arg::new("next_billing")
                        .long("next-billing")
                        .value_name("YYYY-MM-DD"),
                ),
        )
        .subcommand(
            Command::new("rm")
                .visible_alias("delete")
                .about("Delete a subscription by id")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(output_flags(
            Command::new("categories").about("Spend and record count per category"),
        ))
        .subcommand(output_flags(
            Command::new("analytics").about("Renewal status, category and billing cycle distribution"),
        ))
        .subcommand(
            Command::new("export")
                .about("Write the current view to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("shell").about("Interactive session over the in-memory store"))
}
