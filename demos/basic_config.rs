use leafkit::config::Config;
use leafkit::net::{ipv4_to_int, is_ipv4_in};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut conf: Config = "# service\nname=edge\nport=8080\ndebug=on\nupstream=10.0.0.7\n".parse()?;

    let defaults: Config = [("port", "80"), ("timeout", "1.5")].into_iter().collect();
    conf.merge(&defaults);

    println!("name: {}", conf.get_string("name", "unknown"));
    println!("port: {}", conf.get_int("port", 0));
    println!("debug: {}", conf.get_bool("debug", false));
    println!("timeout: {}", conf.get_float("timeout", 0.0));

    let upstream = conf.get_string("upstream", "");
    println!("upstream as int: {}", ipv4_to_int(&upstream)?);
    println!(
        "upstream in 10.0.0.0/24? {}",
        is_ipv4_in(&upstream, "10.0.0.0", "10.0.0.255")?
    );

    Ok(())
}

// Expected output:
// name: edge
// port: 8080
// debug: true
// timeout: 1.5
// upstream as int: 167772167
// upstream in 10.0.0.0/24? true
//
// Explanation: merge only fills keys the file left out, so port stays 8080
// while timeout comes from the defaults.
