use colored::Colorize;

pub(crate) struct FormatService;

const ACTIVE_CHAR: &str = "*";

impl FormatService {
    pub fn active_item_table<F>(descriptors: Vec<String>, active: F)
    where
        F: Fn(usize) -> bool,
    {
        for (i, descriptor) in descriptors.iter().enumerate() {
            if active(i) {
                println!("{} {}", ACTIVE_CHAR.green().bold(), descriptor.bold());
            } else {
                let blank: String = ACTIVE_CHAR.chars().map(|_| ' ').collect();
                println!("{} {}", blank, descriptor);
            }
        }
    }

    pub fn heading(msg: &str) {
        println!("{}", msg.bold().underline());
    }

    pub fn error(msg: &str) {
        eprintln!("{} {}", "[ERROR]".red().bold(), msg);
    }
    pub fn success(msg: &str) {
        println!("{} {}", "[SUCCESS]".green(), msg)
    }
    pub fn info(msg: &str) {
        println!("{} {}", "[INFO]".blue(), msg)
    }
}
