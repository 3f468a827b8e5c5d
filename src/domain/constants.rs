/// Files touched more recently than this are assumed to still be in flight.
pub const STALE_AFTER_SECS: u64 = 300;

pub const DEFAULT_SCAN_DIRS: &[&str] = &[
    "/tmp",
    "/tmp/gradio",
    "/workspace/outputs",
    "/workspace/outputs/txt2img-images",
    "/workspace/outputs/img2img-images",
    "./outputs",
    "./outputs/txt2img-images",
    "./outputs/img2img-images",
];

pub const SWEEP_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "tmp"];

pub const PROMPT_PREFIX: &str = "prompt";

pub const DEFAULT_NVIDIA_SMI: &str = "nvidia-smi";

pub const MODEL_RESET_MESSAGE: &str = "Model reset attempted";
