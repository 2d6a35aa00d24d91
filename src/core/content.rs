//! Static page content
//!
//! Everything here is read-only data: the hero terminal command loop, the
//! canned terminal output, the demo panel script, and the copy for the
//! feature, step, stat, and testimonial sections.

use crate::core::reveal::{DemoLine, DemoLineKind};

/// Commands cycled by the hero terminal typewriter.
pub const HERO_COMMANDS: [&str; 4] = [
    "Import-Module SilentInstall",
    "Connect-SilentInstallPortal -Enterprise",
    "Get-TargetMachines | Measure-Object",
    "Start-SilentDeployment -Software \"Office365\"",
];

/// Output lines appended below the typed command, one every 3 s.
pub const TERMINAL_OUTPUTS: [&str; 4] = [
    "Module imported successfully.",
    "Connected to SilentInstall Enterprise Portal.",
    "Found 247 target machines.",
    "Deployment job created with ID: SI-2025-001",
];

/// Interval between appended terminal output lines
pub const TERMINAL_OUTPUT_INTERVAL_MS: u32 = 3000;

/// Script revealed line-by-line in the demo code panel.
pub const DEMO_LINES: [DemoLine; 8] = [
    DemoLine::new("PS C:\\> Import-Module SilentInstall", DemoLineKind::Prompt),
    DemoLine::new(
        "PS C:\\> Connect-SilentInstallPortal -ApiKey $key",
        DemoLineKind::Prompt,
    ),
    DemoLine::new(
        "PS C:\\> $targets = Get-ADComputer -Filter 'OperatingSystem -like \"*Windows*\"'",
        DemoLineKind::Prompt,
    ),
    DemoLine::new(
        "PS C:\\> New-DeploymentJob -Software 'Microsoft-Office-365' -Targets $targets -Schedule (Get-Date).AddHours(2)",
        DemoLineKind::Prompt,
    ),
    DemoLine::new(
        "PS C:\\> Start-SilentDeployment -JobId $job.Id -Mode Background",
        DemoLineKind::Prompt,
    ),
    DemoLine::new(
        "✅ Deployment initiated successfully. 247 targets queued for installation.",
        DemoLineKind::Success,
    ),
    DemoLine::new(
        "⚡ Zero user interruptions. Zero system downtime.",
        DemoLineKind::Info,
    ),
    DemoLine::new(
        "📊 Monitor progress at https://portal.silentinstall.com/deployments",
        DemoLineKind::Info,
    ),
];

/// A statistic card. `target` is rendered into the element's `data-target`
/// attribute, which the counter driver reads back at trigger time.
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub target: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        target: "2500",
        suffix: "+",
        label: "Machines deployed nightly",
    },
    Stat {
        target: "99.5",
        suffix: "%",
        label: "Silent install success rate",
    },
    Stat {
        target: "500",
        suffix: "+",
        label: "Enterprise IT teams",
    },
    Stat {
        target: "80",
        suffix: "h",
        label: "Admin hours saved monthly",
    },
];

/// A feature card: icon name, title, body.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "silent",
        title: "Truly Silent",
        description: "Installs run in the background with zero prompts, zero reboots during work hours, and zero tickets from interrupted users.",
    },
    Feature {
        icon: "fleet",
        title: "Fleet-Scale Targeting",
        description: "Pipe Active Directory queries straight into deployment jobs. Target one lab or ten thousand laptops with the same one-liner.",
    },
    Feature {
        icon: "schedule",
        title: "Smart Scheduling",
        description: "Schedule rollouts for maintenance windows. Jobs wait for idle machines and roam with users across sites.",
    },
    Feature {
        icon: "rollback",
        title: "Instant Rollback",
        description: "Every deployment keeps a restore point. One command reverts a bad package across the whole fleet.",
    },
    Feature {
        icon: "audit",
        title: "Audit-Ready Logs",
        description: "Per-machine install logs, signed manifests, and export to your SIEM. Compliance reviews stop being archaeology.",
    },
    Feature {
        icon: "api",
        title: "PowerShell-First API",
        description: "Everything the portal does, the module does. Script it, pipeline it, check it into version control.",
    },
];

/// A "how it works" step.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "Connect your fleet",
        description: "Install the lightweight agent via GPO or Intune. Machines check in within minutes.",
    },
    Step {
        title: "Pick software and targets",
        description: "Choose from 4,000+ pre-packaged titles or upload your own MSI, then filter targets with AD queries.",
    },
    Step {
        title: "Deploy silently",
        description: "Schedule the job and walk away. Watch live progress in the portal while users never notice a thing.",
    },
];

/// A testimonial card.
#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "We pushed Office 365 to 3,000 machines overnight. Not a single help-desk ticket the next morning. I keep checking the logs because I don't quite believe it.",
        author: "Dana Whitfield",
        role: "IT Director, logistics company",
    },
    Testimonial {
        quote: "The PowerShell module is the product. Our whole patch pipeline is forty lines of script and a scheduled task now.",
        author: "Marcus Chen",
        role: "Senior Systems Engineer",
    },
    Testimonial {
        quote: "Rollback saved us during a vendor's broken update. One command, eleven hundred machines back to the previous version before lunch.",
        author: "Priya Raman",
        role: "Endpoint Administrator",
    },
];

/// Greeting logged to the developer console on hydrate.
pub const CONSOLE_GREETING: &str = "⚡ SilentInstall Developer Console\n\
Looks like you're inspecting our code!\n\
We appreciate attention to detail - that's exactly what enterprise IT needs.\n\
\n\
Interested in joining our team? Email: careers@silentinstall.com";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::StatTarget;

    #[test]
    fn test_every_stat_target_parses() {
        for stat in STATS {
            assert!(
                StatTarget::parse(stat.target).is_some(),
                "unparseable stat target: {}",
                stat.target
            );
        }
    }

    #[test]
    fn test_hero_commands_are_non_empty() {
        for command in HERO_COMMANDS {
            assert!(!command.is_empty());
        }
    }
}
