/*
 * SPDX-License-Identifier: MIT
 *
 * Permission is hereby granted, free of charge, to any person obtaining a
 * copy of this software and associated documentation files (the "Software"),
 * to deal in the Software without restriction, including without limitation
 * the rights to use, copy, modify, merge, publish, distribute, sublicense,
 * and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in
 * all copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL
 * THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
 * FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
 * DEALINGS IN THE SOFTWARE.
 */

/* Fleet inventory over iDRAC controllers.
 *
 * USAGE: ./collector -c getall /path/to/password-file
 * The password file holds the shared controller password; its whole trimmed
 * content is the password.
 * Run with `-v` for more output.
 */

use idrac_inventory::{
    ClientPool, CollectorConfig, Credential, DnsResolver, Idrac, Management,
};
use tracing::error;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;

fn main() -> Result<(), anyhow::Error> {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = getopts::Options::new();

    opts.optflag("h", "help", "Print this help");
    opts.optflag("v", "verbose", "Log at DEBUG level. Default is INFO");
    opts.optopt(
        "U",
        "user",
        "Controller login account. Default is root",
        "USER",
    );
    opts.optopt(
        "H",
        "controller",
        "Controller to target with the summary command",
        "HOST",
    );
    opts.optopt(
        "c",
        "cmd",
        "Command to run:
                getall
                getmacs
                summary",
        "CMD",
    );

    let brief = "collector [-v] [-U user] [-H controller] [-c cmd] password-file";
    let args_given = opts.parse(&args[1..])?;
    if args_given.opt_present("h") {
        eprintln!("{}", opts.usage(brief));
        return Ok(());
    }
    let Some(password_file) = args_given.free.first() else {
        eprintln!("{}", opts.usage(brief));
        std::process::exit(1);
    };

    let log_level = if args_given.opt_present("v") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::from_default_env()
        .add_directive(log_level.into())
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap());
    tracing_subscriber::registry()
        .with(Layer::default().compact())
        .with(env_filter)
        .init();

    let user = args_given.opt_str("U").unwrap_or_else(|| "root".to_string());
    let cred = Credential::from_file(password_file, &user)?;

    let pool = ClientPool::builder().build()?;
    let idrac = Idrac::new(pool);

    match args_given.opt_str("c").as_deref().unwrap_or("getall") {
        "getall" => print_pass(&CollectorConfig::default(), &cred, &idrac),
        "getmacs" => {
            let config = CollectorConfig {
                first: 1,
                last: 1,
                with_summary: true,
                ..Default::default()
            };
            print_pass(&config, &cred, &idrac);
        }
        "summary" => {
            let Some(controller) = args_given.opt_str("H") else {
                eprintln!("{}", opts.usage(brief));
                std::process::exit(1);
            };
            println!("{}", idrac.summary(&controller, &cred)?);
        }
        other => {
            error!("Unsupported command specified {other}");
        }
    }

    Ok(())
}

fn print_pass(config: &CollectorConfig, cred: &Credential, mgmt: &dyn Management) {
    for record in config.collect(cred, mgmt, &DnsResolver) {
        println!("{record}");
    }
}
