mod firewall_rules;
mod locations;
