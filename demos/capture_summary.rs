// demos/capture_summary.rs
use pcapinfo_rs::*;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "capture.pcap".to_string());

    let (variant, endianness) = classify(&path)?;
    println!("{}: {} ({:?}-endian)", path, variant, endianness);

    if !is_pcap(&path)? {
        println!("  not a classic capture; nothing further to report");
        return Ok(());
    }

    let (major, minor) = version(&path)?;
    println!("  format   v{}.{}", major, minor);
    println!("  link     {}", data_link(&path)?);

    match record_count(&path) {
        Ok(0) => println!("  records  0"),
        Ok(count) => {
            println!("  records  {}", count);
            println!("  first    {:?}", first_timestamp(&path)?.to_system_time());
            println!("  last     {:?}", last_timestamp(&path)?.to_system_time());
            println!("  span     {:?}", duration(&path)?);
        }
        Err(e) => println!("  records  unavailable ({})", e),
    }

    println!("  sha256   {}", file_digest(&path, DigestAlgorithm::Sha256)?);

    Ok(())
}
