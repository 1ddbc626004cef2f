//! Display text for the built-in commands and the welcome banner.
//!
//! Every block starts with a newline, so the first revealed line is blank.

/// Command overview printed by `help`.
pub const HELP: &str = r#"
Available commands:

  help      - Show this help message
  about     - Learn more about me
  projects  - View my cybersecurity projects
  skills    - See my technical skills
  contact   - Get my contact information
  clear     - Clear the terminal
  
Type any command and press Enter to execute."#;

/// Short bio printed by `about`.
pub const ABOUT: &str = r#"
About Navya Nepal
================

Hi! I'm Navya Nepal, a cybersecurity enthusiast currently studying at 
Softwarica College. I love solving Capture the Flag (CTF) challenges, 
analyzing malware, and building security tools to make the digital 
world a safer place.

When I'm not diving deep into security research, you can find me 
experimenting with new tools, participating in CTF competitions, 
and contributing to open-source security projects."#;

pub const PROJECTS: &str = r#"
Recent Projects
===============

[1] Steganography Tool
    └── Language: Python
    └── Hide and extract secret messages in images
    └── Features AES encryption and LSB technique
    
[2] Encrypted Chat System
    └── Secure real-time messaging application
    └── End-to-end encryption implementation
    └── Built with modern cryptographic standards
    
[3] Vulnerability Scanner
    └── Automated security assessment tool
    └── Identifies common web vulnerabilities
    └── Generates detailed security reports

Each project showcases different aspects of cybersecurity 
and demonstrates practical security implementations."#;

/// Skill matrix printed by `skills`.
pub const SKILLS: &str = r#"
Technical Arsenal
=================

Network Analysis:
  ├── Wireshark     [████████████] Expert
  └── Nmap          [██████████  ] Advanced
  
Security Testing:
  ├── Burp Suite    [████████████] Expert
  └── Metasploit    [████████    ] Intermediate
  
Programming:
  ├── Python        [████████████] Expert
  ├── JavaScript    [██████████  ] Advanced
  ├── Bash/Shell    [████████    ] Intermediate
  └── C/C++         [██████      ] Intermediate

Specializations: Penetration Testing, Malware Analysis, 
Digital Forensics, Secure Code Review"#;

pub const CONTACT: &str = r#"
Contact Information
===================

GitHub:   https://github.com/navyanepal
LinkedIn: https://linkedin.com/in/navyanepal
Email:    Available upon request

═══════════════════════════════════════════════════

Feel free to reach out for collaboration opportunities,
CTF team invitations, or cybersecurity discussions!

PGP Key: Available on request for secure communications"#;

/// Banner revealed when a session starts.
pub const WELCOME: &str = r#"
┌─────────────────────────────────────────────────────────────┐
│                                                             │
│  ███╗   ██╗ █████╗ ██╗   ██╗██╗   ██╗ █████╗               │
│  ████╗  ██║██╔══██╗██║   ██║╚██╗ ██╔╝██╔══██╗              │
│  ██╔██╗ ██║███████║██║   ██║ ╚████╔╝ ███████║              │
│  ██║╚██╗██║██╔══██║╚██╗ ██╔╝  ╚██╔╝  ██╔══██║              │
│  ██║ ╚████║██║  ██║ ╚████╔╝    ██║   ██║  ██║              │
│  ╚═╝  ╚═══╝╚═╝  ╚═╝  ╚═══╝     ╚═╝   ╚═╝  ╚═╝              │
│                                                             │
│                    navya.nepal [ Version 1.0.0 ]           │
│                                                             │
└─────────────────────────────────────────────────────────────┘

Welcome to my cybersecurity terminal portfolio!

System initialized... Loading user profile...
Security protocols activated... ✓
Firewall status: ACTIVE ✓
Intrusion detection: ENABLED ✓

Type 'help' to see available commands or explore on your own.
Happy hacking! 🔐"#;
