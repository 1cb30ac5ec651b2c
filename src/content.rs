//! Fixed showcase copy and statistics. Nothing here is computed at runtime.

use serde::Serialize;

pub const SITE_TITLE: &str = "Lunar Lander RL";
pub const TOTAL_EPISODES: usize = 20;
pub const VIDEO_DIR: &str = "videos";
pub const VIDEO_STEM: &str = "rl-video-episode";
pub const TRAINING_CHART_PATH: &str = "traindata.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Videos,
    About,
    Performance,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Videos, Section::About, Section::Performance];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Videos => "videos",
            Self::About => "about",
            Self::Performance => "performance",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Videos => "Videos",
            Self::About => "About",
            Self::Performance => "Performance",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Videos => 0,
            Self::About => 1,
            Self::Performance => 2,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Videos => Self::About,
            Self::About => Self::Performance,
            Self::Performance => Self::Videos,
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }
}

pub struct Hero {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
    pub target: Section,
}

pub const HERO: Hero = Hero {
    headline: "Reinforcement Learning with Lunar Lander",
    tagline: "Explore 20 episodes of an AI agent learning to land a spacecraft through deep reinforcement learning",
    call_to_action: "Watch Episodes",
    target: Section::Videos,
};

pub const GALLERY_TITLE: &str = "Lunar Lander Episodes";

pub fn episode_blurb(index: usize) -> String {
    format!(
        "Episode {} shows the trained reinforcement learning agent attempting to land the lunar module safely on the surface. Each episode demonstrates the agent's policy after training, showing how it handles different initial conditions and applies the learned control strategy.",
        index + 1
    )
}

pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_HEADING: &str = "Reinforcement Learning in Lunar Lander";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "This project demonstrates the application of Deep Q-Network (DQN), a reinforcement learning algorithm, to teach an agent to successfully land a lunar module on the moon's surface. The agent learns to control the module's thrusters to achieve a safe landing.",
    "The videos showcase 20 episodes of the trained agent, demonstrating how reinforcement learning can be applied to solve complex control problems. Each episode represents a different initial condition, showcasing the agent's ability to generalize its learning.",
];

pub const ABOUT_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Deep Q-Network (DQN)",
        body: "A reinforcement learning algorithm that combines Q-learning with deep neural networks to approximate optimal action-value functions.",
    },
    Highlight {
        title: "OpenAI Gymnasium",
        body: "Using the Lunar Lander environment from Gymnasium to provide a realistic simulation of lunar landing physics.",
    },
    Highlight {
        title: "Training Progress",
        body: "The agent was trained over multiple episodes, gradually improving its landing strategy through trial and error.",
    },
];

pub const HOW_IT_WORKS_INTRO: &str = "The Lunar Lander environment presents a challenging control problem. The agent must learn to:";

pub const HOW_IT_WORKS_STEPS: [&str; 4] = [
    "Control the main engine and side thrusters",
    "Balance fuel efficiency and landing precision",
    "Adjust for different initial positions and velocities",
    "Land softly on the designated landing pad",
];

pub const HOW_IT_WORKS_OUTRO: &str = "Using a reward system that penalizes crashes and rewards soft landings, the agent learns through thousands of attempts, gradually improving its strategy. The neural network maps states (position, velocity, angle) to optimal actions (fire main engine, fire left/right thrusters, or do nothing).";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceStats {
    pub average_return: f64,
    pub success_rate_percent: u8,
    pub training_episodes: u32,
    pub average_episode_length: u32,
}

pub const PERFORMANCE: PerformanceStats = PerformanceStats {
    average_return: 233.21,
    success_rate_percent: 85,
    training_episodes: 988,
    average_episode_length: 452,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub note: &'static str,
}

impl PerformanceStats {
    pub fn cards(&self) -> [MetricCard; 4] {
        [
            MetricCard {
                label: "Average Return",
                value: format!("{:.2}", self.average_return),
                note: "Across final 20 episodes",
            },
            MetricCard {
                label: "Success Rate",
                value: format!("{}%", self.success_rate_percent),
                note: "Safe landings in test runs",
            },
            MetricCard {
                label: "Training Episodes",
                value: self.training_episodes.to_string(),
                note: "Total learning episodes",
            },
            MetricCard {
                label: "Avg Episode Length",
                value: self.average_episode_length.to_string(),
                note: "Time steps per episode",
            },
        ]
    }
}

pub const TRAINING_CHART_CAPTION: &str = "The graph shows the agent's reward improving over training episodes, with the running average (black line) trending upward.";

pub const TRAINING_SUMMARY: &str = "The training curve demonstrates how the agent improved over time. Initially, the agent performed poorly, often crashing the lander. As training progressed, it learned more effective control strategies, eventually achieving consistently high rewards.";

pub const ALGORITHM_DETAILS: [(&str, &str); 6] = [
    ("Algorithm", "Deep Q-Network (DQN)"),
    ("Network Architecture", "Multi-layer perceptron"),
    ("Input State Size", "8 dimensions"),
    ("Action Space", "4 discrete actions"),
    ("Experience Replay", "Used for stable learning"),
    ("Exploration Strategy", "Epsilon-greedy policy"),
];

pub const FOOTER_NOTE: &str = "© 2025 Lunar Lander Reinforcement Learning Project";
