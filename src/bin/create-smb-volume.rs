// Copyright 2026 The netappfiles developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Creates an SMB volume with Azure NetApp Files.
//!
//! Expects `AZURE_AUTH_LOCATION` to point at a service principal file and,
//! optionally, `ANF_SAMPLE_CONFIG` at a YAML file with sample parameters.

use std::process;

use netappfiles::sample::{self, Console, SampleConfig};

const HEADER: &str = "Azure NetAppFiles Rust Sample - Sample project that creates \
                      a SMB Volume with Azure NetApp Files REST API with Rust";

const PASSWORD_PROMPT: &str = "Please type Active Directory's user password that will \
                               domain join ANF's SMB server and press [ENTER]:";

fn fail(console: &mut Console<std::io::Stdout>, err: &dyn std::fmt::Display) -> ! {
    console.output(&format!("An error ocurred. Error details: {}", err));
    process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let mut console = Console::stdout();
    let config = SampleConfig::from_env().unwrap_or_else(|err| fail(&mut console, &err));
    console.header(HEADER);

    let password =
        rpassword::prompt_password(PASSWORD_PROMPT).unwrap_or_else(|err| fail(&mut console, &err));
    if sample::check_password(&password, &mut console).is_err() {
        process::exit(1);
    }

    let cloud = netappfiles::Cloud::from_env().unwrap_or_else(|err| fail(&mut console, &err));

    let cleanup = config.should_cleanup;
    if let Err(err) = sample::run(&cloud, &config, &password, cleanup, &mut console).await {
        log::error!("Provisioning failed: {}", err);
        process::exit(1);
    }
}
